//! Rendering of the two TestNG document shapes.
//!
//! The byte layout is part of the contract with the downstream runner and
//! with existing tooling that diffs regenerated descriptors, so documents
//! are built by plain string templating: declaration, DOCTYPE, indentation,
//! and the explicit closing tag on the `TestType` parameter all match the
//! historical output exactly.

use std::fmt::Write as _;

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                          <!DOCTYPE suite SYSTEM \"http://testng.org/testng-1.0.dtd\">\n";

/// Class-name prefix for generated test references; the module key is
/// appended with its first letter uppercased.
pub const TEST_CLASS_PREFIX: &str = "pom.auto.test.Test_";

/// One `<test>` block of a module suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEntry {
    /// Display name of the `<test>` element.
    pub display_name: String,
    /// Fully qualified test class, e.g. `pom.auto.test.Test_Login`.
    pub class_name: String,
    /// Method to include, always the flow key.
    pub method: String,
}

/// Render a per-module suite document.
pub fn suite_document(
    suite_name: &str,
    parallel: &str,
    thread_count: u32,
    tests: &[TestEntry],
) -> String {
    let mut xml = String::from(XML_HEADER);
    let _ = writeln!(
        xml,
        "<suite name=\"{suite_name}\" parallel=\"{parallel}\" thread-count=\"{thread_count}\">"
    );
    xml.push('\n');

    for test in tests {
        let _ = writeln!(xml, "    <test name=\"{}\">", test.display_name);
        xml.push_str("        <parameter name=\"BrowserType\" value=\"Chrome\"/>\n");
        xml.push_str("        <parameter name=\"TestType\" value=\"NormalTest\"></parameter>\n");
        xml.push_str("        <classes>\n");
        let _ = writeln!(xml, "            <class name=\"{}\">", test.class_name);
        xml.push_str("                <methods>\n");
        let _ = writeln!(xml, "                    <include name=\"{}\"/>", test.method);
        xml.push_str("                </methods>\n");
        xml.push_str("            </class>\n");
        xml.push_str("        </classes>\n");
        xml.push_str("    </test>\n\n");
    }

    xml.push_str("</suite>\n");
    xml
}

/// Render the master descriptor referencing every generated module file.
///
/// `suite_files` holds runner-relative paths such as
/// `generados/testng-login.xml`, in module order.
pub fn master_document(suite_files: &[String]) -> String {
    let mut xml = String::from(XML_HEADER);
    xml.push_str("<suite name=\"Suite de pruebas\">\n");
    xml.push_str("    <suite-files>\n");

    for path in suite_files {
        let _ = writeln!(xml, "      <suite-file path=\"{path}\"/>");
    }

    xml.push_str("    </suite-files>\n");
    xml.push_str("</suite>\n");
    xml
}

/// Uppercase the first character, leaving the rest unchanged.
///
/// Empty input passes through unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

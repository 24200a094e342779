//! Render smoke tests for every example component.

use std::path::PathBuf;

use serde::Serialize;

use crate::templates::{TemplateEngine, TEST_SUITE};

/// Settings for the generated test suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuiteSettings {
    /// Test file to overwrite
    pub file: PathBuf,

    /// Namespace of the test fixture
    pub namespace: String,

    /// Class name of the test fixture
    pub class_name: String,

    /// Namespaces imported at the top of the file
    pub usings: Vec<String>,
}

impl Default for TestSuiteSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from("src/MudBlazor.UnitTests/Components/_AllComponents.cs"),
            namespace: "MudBlazor.UnitTests.Components".to_string(),
            class_name: "_AllComponents".to_string(),
            usings: [
                "Microsoft.AspNetCore.Components",
                "Microsoft.Extensions.DependencyInjection",
                "NUnit.Framework",
                "MudBlazor.UnitTests.Mocks",
                "MudBlazor.Docs",
                "MudBlazor.Dialog",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TestSuiteContext<'a> {
    usings: &'a [String],
    namespace: &'a str,
    class_name: &'a str,
    components: &'a [String],
}

/// Render the test suite with one test per component, in the given order.
pub fn render_test_suite(
    components: &[String],
    templates: &TemplateEngine,
    settings: &TestSuiteSettings,
) -> Result<String, minijinja::Error> {
    templates.render(
        TEST_SUITE,
        &TestSuiteContext {
            usings: &settings.usings,
            namespace: &settings.namespace,
            class_name: &settings.class_name,
            components,
        },
    )
}

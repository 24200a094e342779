//! Example files and the rules that qualify them.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::blocks::SourceBlocks;
use crate::scan::ScanError;
use crate::strip::strip_directives;

/// Naming rules that decide which files are examples and where their
/// generated markup goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRules {
    /// Source file extension, without the dot (e.g., "razor")
    pub extension: String,

    /// Substring a filename must contain to be an example
    pub discriminator: String,

    /// Directory name holding examples (e.g., "Examples")
    pub examples_segment: String,

    /// Replacement directory name and filename suffix for generated markup
    pub code_segment: String,
}

impl Default for ExampleRules {
    fn default() -> Self {
        Self {
            extension: "razor".to_string(),
            discriminator: "Example".to_string(),
            examples_segment: "Examples".to_string(),
            code_segment: "Code".to_string(),
        }
    }
}

impl ExampleRules {
    /// Filename ending shared by every generated markup file (e.g., "Code.razor").
    pub fn generated_suffix(&self) -> String {
        format!("{}.{}", self.code_segment, self.extension)
    }

    /// Check whether a path names an example source.
    ///
    /// The file must carry the source extension, contain the discriminator and
    /// must not be a generated markup file.
    pub fn is_example(&self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != self.extension {
            return false;
        }

        let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        filename.contains(&self.discriminator) && !filename.ends_with(&self.generated_suffix())
    }

    /// Compute where the generated markup for an example is written.
    ///
    /// Below `root`, every directory named like `examples_segment` becomes
    /// `code_segment`, and the file stem gets `code_segment` appended:
    /// `Button/Examples/ButtonExample.razor` -> `Button/Code/ButtonExampleCode.razor`.
    pub fn markup_path(&self, root: &Path, example: &Path) -> PathBuf {
        let (base, relative) = match example.strip_prefix(root) {
            Ok(relative) => (root.to_path_buf(), relative),
            Err(_) => (PathBuf::new(), example),
        };

        let mut target = base;
        if let Some(parent) = relative.parent() {
            for component in parent.components() {
                match component {
                    Component::Normal(name) if name == self.examples_segment.as_str() => {
                        target.push(&self.code_segment)
                    }
                    other => target.push(other.as_os_str()),
                }
            }
        }

        let stem = component_name(example);
        target.push(format!("{}{}.{}", stem, self.code_segment, self.extension));
        target
    }
}

/// Derive the component name of an example from its file stem.
pub fn component_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// A loaded example component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSource {
    /// Path of the example file
    pub path: PathBuf,

    /// Component name (file stem)
    pub component_name: String,

    /// Raw file content
    pub source: String,
}

impl ExampleSource {
    /// Create an example from already-loaded content.
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            component_name: component_name(&path),
            path,
            source: source.into(),
        }
    }

    /// Read an example from disk.
    pub fn read(path: &Path) -> Result<Self, ScanError> {
        let source = fs::read_to_string(path).map_err(|e| ScanError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::new(path, source))
    }

    /// Source with directive lines removed.
    pub fn stripped(&self) -> String {
        strip_directives(&self.source)
    }

    /// Stripped source split into markup and code-behind.
    pub fn blocks(&self) -> SourceBlocks {
        SourceBlocks::split(&self.stripped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn qualifies_examples() {
        let rules = ExampleRules::default();

        assert!(rules.is_example(Path::new("Docs/Examples/ButtonExample.razor")));
        assert!(rules.is_example(Path::new("ExampleDialog.razor")));
        assert!(!rules.is_example(Path::new("Docs/Button.razor")));
        assert!(!rules.is_example(Path::new("Docs/Code/ButtonExampleCode.razor")));
        assert!(!rules.is_example(Path::new("Docs/ButtonExample.cs")));
    }

    #[test]
    fn rewrites_markup_path() {
        let rules = ExampleRules::default();
        let root = Path::new("/docs");

        let target = rules.markup_path(
            root,
            Path::new("/docs/Components/Button/Examples/ButtonExample.razor"),
        );

        assert_eq!(
            target,
            PathBuf::from("/docs/Components/Button/Code/ButtonExampleCode.razor")
        );
    }

    #[test]
    fn leaves_ancestors_outside_root_alone() {
        let rules = ExampleRules::default();
        let root = Path::new("/Examples/docs");

        let target = rules.markup_path(root, Path::new("/Examples/docs/Chip/ChipExample.razor"));

        assert_eq!(
            target,
            PathBuf::from("/Examples/docs/Chip/ChipExampleCode.razor")
        );
    }

    #[test]
    fn generated_markup_is_never_an_example() {
        let rules = ExampleRules::default();
        let root = Path::new("docs");
        let example = Path::new("docs/Examples/TableExample.razor");

        assert!(rules.is_example(example));
        assert!(!rules.is_example(&rules.markup_path(root, example)));
    }

    #[test]
    fn derives_component_name() {
        let example = ExampleSource::new("a/b/ButtonExample.razor", "<p>hi</p>");

        assert_eq!(example.component_name, "ButtonExample");
    }

    #[test]
    fn blocks_strip_directives_first() {
        let example = ExampleSource::new(
            "ButtonExample.razor",
            "@namespace Docs.Examples\n<p>hi</p>\n@code {\n}\n",
        );

        let blocks = example.blocks();

        assert_eq!(blocks.markup, "<p>hi</p>\n");
        assert_eq!(blocks.code.as_deref(), Some(" {\n}"));
    }
}

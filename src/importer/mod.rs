//! The Tag Importer: scans one HTML document and imports the AMP
//! script tags it needs.
//!
//! Pass order:
//! 1. placeholder step — replace the marker with the runtime tag, or
//!    prepend the runtime tag to `<head>` when the marker is absent
//!    and the tag is missing;
//! 2. conditional rules from [`rules::RULES`], each gated by a
//!    presence check;
//! 3. splice the collected edits into the original text.
//!
//! The pass is infallible and idempotent: running it on its own output
//! changes nothing, byte for byte.

mod insert;
mod rules;
mod scan;
mod tags;


pub use tags::DEFAULT_PLACEHOLDER;

use crate::debug;
use crate::pipeline::{FileBuffer, Transform};
use insert::Splice;
use rules::{Anchor, RULES};
use scan::DocScan;

// =============================================================================
// Types
// =============================================================================

/// Imports required AMP tags into one HTML document.
pub struct TagImporter {
    placeholder: String,
}

/// Result of one import pass.
pub struct ImportOutput {
    pub html: String,
    /// Names of the tags imported by this pass, in table order.
    pub imported: Vec<&'static str>,
}

// =============================================================================
// Importer
// =============================================================================

impl TagImporter {
    pub fn new() -> Self {
        Self {
            placeholder: tags::DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Override the placeholder token recognized in input documents.
    pub fn with_placeholder(mut self, token: impl Into<String>) -> Self {
        self.placeholder = token.into();
        self
    }

    /// Run the import pass over one document.
    pub fn import(&self, html: &str) -> ImportOutput {
        let scan = DocScan::parse(html);
        let present = scan.present_scripts();

        let mut edits: Vec<Splice> = Vec::new();
        let mut imported = Vec::new();

        // Placeholder step: a present marker receives the runtime tag
        // even if the tag already exists elsewhere; only the first
        // occurrence is replaced.
        if let Some(at) = html.find(&self.placeholder) {
            edits.push(Splice {
                at,
                remove: self.placeholder.len(),
                text: tags::AMP_RUNTIME_TAG,
            });
            imported.push(tags::AMP_RUNTIME_NAME);
        } else if !present.has_src(tags::AMP_RUNTIME_SRC) {
            match insert::resolve(html, Anchor::HeadStart) {
                Some(at) => {
                    edits.push(Splice {
                        at,
                        remove: 0,
                        text: tags::AMP_RUNTIME_TAG,
                    });
                    imported.push(tags::AMP_RUNTIME_NAME);
                }
                None => {
                    debug!("import"; "no <head> to receive the runtime tag, skipping");
                }
            }
        }

        // Conditional extension rules, in table order.
        for rule in RULES {
            if present.contains(rule.name, rule.src) || !scan.matches(&rule.when) {
                continue;
            }
            let Some(at) = insert::resolve(html, rule.anchor) else {
                debug!("import"; "no {:?} anchor for {}, skipping", rule.anchor, rule.name);
                continue;
            };
            edits.push(Splice {
                at,
                remove: 0,
                text: rule.tag,
            });
            imported.push(rule.name);
        }

        ImportOutput {
            html: insert::splice(html, edits),
            imported,
        }
    }
}

impl Default for TagImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for TagImporter {
    fn transform(self, buf: FileBuffer) -> FileBuffer {
        let out = self.import(&buf.contents);

        if out.imported.is_empty() {
            debug!("import"; "{}: no tags needed", buf.path.display());
        } else {
            debug!("import"; "{}: imported {}", buf.path.display(), out.imported.join(", "));
        }

        FileBuffer {
            path: buf.path,
            contents: out.html,
        }
    }
}

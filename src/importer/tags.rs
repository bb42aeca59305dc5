//! Literal AMP tag strings and detection constants.
//!
//! Tag text is spliced into documents verbatim, so these literals must
//! stay in the exact form the AMP cache expects.

/// Default placeholder token marking where the runtime tag belongs.
pub const DEFAULT_PLACEHOLDER: &str = "${ampjs}";

/// Script source of the base AMP runtime.
pub const AMP_RUNTIME_SRC: &str = "https://cdn.ampproject.org/v0.js";

/// The base runtime tag every AMP document needs.
pub const AMP_RUNTIME_TAG: &str =
    r#"<script async src="https://cdn.ampproject.org/v0.js"></script>"#;

/// Name reported when the runtime tag is imported.
pub const AMP_RUNTIME_NAME: &str = "amp-runtime";

/// Script source of the amp-bind extension.
pub const AMP_BIND_SRC: &str = "https://cdn.ampproject.org/v0/amp-bind-0.1.js";

/// Extension tag for `amp-bind` (state bindings, `AMP.setState`).
pub const AMP_BIND_TAG: &str = r#"<script async custom-element="amp-bind" src="https://cdn.ampproject.org/v0/amp-bind-0.1.js"></script>"#;

/// Script source of the amp-access extension.
pub const AMP_ACCESS_SRC: &str = "https://cdn.ampproject.org/v0/amp-access-0.1.js";

/// Extension tag for `amp-access` (access control).
pub const AMP_ACCESS_TAG: &str = r#"<script async custom-element="amp-access" src="https://cdn.ampproject.org/v0/amp-access-0.1.js"></script>"#;

/// Script source of the amp-access-laterpay extension.
pub const AMP_ACCESS_LATERPAY_SRC: &str =
    "https://cdn.ampproject.org/v0/amp-access-laterpay-0.2.js";

/// Extension tag for `amp-access-laterpay` (LaterPay vendor dialog).
pub const AMP_ACCESS_LATERPAY_TAG: &str = r#"<script async custom-element="amp-access-laterpay" src="https://cdn.ampproject.org/v0/amp-access-laterpay-0.2.js"></script>"#;

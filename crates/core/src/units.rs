//! The fixed list of academic units resources can be filed under.

use serde::Serialize;

/// One selectable academic unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Unit {
    /// Display label.
    pub label: &'static str,
    /// Short code used in forms.
    pub value: &'static str,
}

/// Units offered by the upload form.
pub const ALLOWED_UNITS: &[Unit] = &[
    Unit {
        label: "Probability & Statistics",
        value: "pro_stats",
    },
    Unit {
        label: "Multimedia System Applications",
        value: "mmsa",
    },
    Unit {
        label: "Management Information System",
        value: "mis",
    },
    Unit {
        label: "Client Side Programming",
        value: "csp",
    },
    Unit {
        label: "Human Centered Interaction",
        value: "hci",
    },
];

/// Look up the display label for a unit code, if it is a known code.
pub fn unit_label(value: &str) -> Option<&'static str> {
    ALLOWED_UNITS
        .iter()
        .find(|u| u.value == value)
        .map(|u| u.label)
}

//! Non-empty field defaults shared by several records.

pub(crate) fn yes() -> bool {
    true
}

pub(crate) fn whatsapp() -> String {
    "whatsapp".to_string()
}

pub(crate) fn medium() -> String {
    "medium".to_string()
}

pub(crate) fn tax_year() -> i32 {
    2025
}

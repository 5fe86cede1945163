//! Initials avatars with a color derived deterministically from the name.

use dioxus::prelude::*;

const AVATAR_CSS: Asset = asset!("/assets/styling/avatar.css");

const AVATAR_COLORS: [&str; 10] = [
    "#228be6", "#12b886", "#7950f2", "#fd7e14", "#15aabf", "#e64980", "#4c6ef5", "#be4bdb",
    "#74b816", "#fa5252",
];

/// 31-style string hash over UTF-16 code units, wrapping at 32 bits.
fn name_hash(name: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}

/// Pick a stable avatar color for a display name.
pub fn avatar_color(name: &str) -> &'static str {
    AVATAR_COLORS[(name_hash(name) as usize) % AVATAR_COLORS.len()]
}

/// Initials from separate first and last names: "Jane", "Doe" -> "JD".
pub fn initials(first_name: &str, last_name: &str) -> String {
    let mut out = String::new();
    out.extend(first_name.chars().next());
    out.extend(last_name.chars().next());
    out.to_uppercase()
}

/// Initials from a single display name: first and last word when there are
/// two or more, otherwise the leading character.
pub fn initials_from_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() >= 2 {
        let mut out = String::new();
        out.extend(parts[0].chars().next());
        out.extend(parts[parts.len() - 1].chars().next());
        return out.to_uppercase();
    }
    name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default()
}

/// Colored circle with initials.
#[component]
pub fn Avatar(name: String, initials: String, #[props(default = false)] large: bool) -> Element {
    let color = avatar_color(&name);
    let class = if large { "avatar avatar-large" } else { "avatar" };

    rsx! {
        document::Stylesheet { href: AVATAR_CSS }

        div {
            class: "{class}",
            style: "background-color: {color}",
            span { class: "avatar-text", "{initials}" }
        }
    }
}

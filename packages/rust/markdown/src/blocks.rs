//! Rendering of individual sections and small formatting helpers.
//!
//! Each function appends to the output buffer and leaves it ending in `\n`.

use ghdiscuss_shared::{Section, SectionBody};

/// Render one section: bold title line, body, then a blank line.
pub(crate) fn push_section(out: &mut String, section: &Section) {
    out.push_str(&format!("**{}**\n", section.title));
    push_body(out, &section.body);
    out.push('\n');
}

fn push_body(out: &mut String, body: &SectionBody) {
    match body {
        SectionBody::Text(text) => {
            out.push_str(text);
            out.push('\n');
        }
        SectionBody::Bullets(items) => {
            for item in items {
                out.push_str(&format!("- {item}\n"));
            }
        }
        SectionBody::Pairs(pairs) => {
            for pair in pairs {
                out.push_str(&format!("- **{}**: {}\n", pair.key, pair.value));
            }
        }
        SectionBody::Code(code) => {
            out.push_str("```\n");
            out.push_str(code.trim_end_matches('\n'));
            out.push_str("\n```\n");
        }
    }
}

/// Format an integer with `,` thousands separators (`234000` → `234,000`).
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

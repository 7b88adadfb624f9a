// src/utils/xml.rs

//! XML text sanitising.

/// Whether `c` may appear in an XML 1.0 document. C1 controls (except
/// NEL) and the Unicode noncharacters are rejected as well.
fn is_xml_safe(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{0}'..='\u{1F}' => false,
        '\u{7F}'..='\u{84}' | '\u{86}'..='\u{9F}' => false,
        '\u{FDD0}'..='\u{FDEF}' | '\u{FFFE}' | '\u{FFFF}' => false,
        _ => true,
    }
}

/// Remove characters that are illegal in XML 1.0.
pub fn clean_xml_text(text: &str) -> String {
    text.chars().filter(|&c| is_xml_safe(c)).collect()
}

/// Split CDATA terminators so `text` can be embedded in a CDATA section.
pub fn escape_cdata(text: &str) -> String {
    text.replace("]]>", "]]]]><![CDATA[>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(clean_xml_text("a\u{0}b\u{8}c\u{B}d"), "abcd");
        assert_eq!(clean_xml_text("tab\tnl\ncr\r"), "tab\tnl\ncr\r");
    }

    #[test]
    fn test_strips_c1_and_noncharacters() {
        assert_eq!(clean_xml_text("x\u{80}y\u{85}z\u{9F}"), "xy\u{85}z");
        assert_eq!(clean_xml_text("a\u{FDD0}b\u{FFFE}c\u{FFFF}"), "abc");
    }

    #[test]
    fn test_keeps_regular_unicode() {
        assert_eq!(clean_xml_text("Genève – Ünïcödé 🙂"), "Genève – Ünïcödé 🙂");
    }

    #[test]
    fn test_escape_cdata() {
        assert_eq!(escape_cdata("a]]>b"), "a]]]]><![CDATA[>b");
        assert_eq!(escape_cdata("plain"), "plain");
    }
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex");
    static ref PHONE_RE: Regex = Regex::new(r"\+?\d[\d\s-]{8,15}").expect("valid phone regex");
}

/// Contact facts pulled from resume text. Absence is represented at the type
/// level; the "Not Found" sentinel belongs to the presentation layer only.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// First-match extraction of email, phone and candidate name. The three
/// fields are independent; a miss on one never aborts the others.
///
/// The phone pattern takes the first digit run of plausible length, so a date
/// or ID number earlier in the document can win over the real number. Known
/// precision limitation.
pub fn extract_contact_details(text: &str) -> ContactDetails {
    ContactDetails {
        name: first_person_name(text),
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_RE.find(text).map(|m| m.as_str().trim().to_string()),
    }
}

const NAME_STOPWORDS: &[&str] = &[
    "resume", "curriculum", "vitae", "summary", "objective", "profile", "contact", "email",
    "phone", "mobile", "address", "skills", "education", "experience", "projects", "engineer",
    "developer", "analyst", "manager",
];

/// Rule-based person-name recognition over the leading lines of the document.
///
/// The input arrives lowercased (see `read::extract_text`), which degrades
/// recognition of proper nouns; that tradeoff is inherited from the matching
/// pipeline and accepted rather than fixed here.
fn first_person_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(10)
        .find(|line| looks_like_person_name(line))
        .map(|line| line.to_string())
}

fn looks_like_person_name(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&tokens.len()) {
        return false;
    }
    tokens.iter().all(|token| {
        token.len() >= 2
            && token.chars().all(|c| c.is_alphabetic())
            && !NAME_STOPWORDS.contains(token)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "john doe\nemail: john.doe@example.com\nphone: +91 98765 43210\nskills: python, sql";

    #[test]
    fn finds_email_phone_and_name() {
        let contact = extract_contact_details(SAMPLE);
        assert_eq!(contact.name.as_deref(), Some("john doe"));
        assert_eq!(contact.email.as_deref(), Some("john.doe@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("+91 98765 43210"));
    }

    #[test]
    fn missing_email_leaves_other_fields_intact() {
        let contact = extract_contact_details("jane roe\ncall 9876543210\npython developer");
        assert_eq!(contact.email, None);
        assert_eq!(contact.name.as_deref(), Some("jane roe"));
        assert_eq!(contact.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn first_email_match_wins() {
        let contact = extract_contact_details("a@b.com later c@d.org");
        assert_eq!(contact.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn heading_lines_are_not_names() {
        let contact = extract_contact_details("curriculum vitae\nskills education\n12345");
        assert_eq!(contact.name, None);
    }

    #[test]
    fn empty_text_yields_all_absent() {
        let contact = extract_contact_details("");
        assert_eq!(
            contact,
            ContactDetails {
                name: None,
                email: None,
                phone: None
            }
        );
    }
}

//! Contact Form Validation
//!
//! Pure field rules for the contact page. Every rule runs on submit so all
//! invalid fields surface at once; errors never leave the component.

/// Contact form fields
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Per-field error messages, `None` when the field is fine
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    /// Clear exactly one field's error, leaving the others alone
    pub fn clear(&mut self, field: ContactField) {
        match field {
            ContactField::Name => self.name = None,
            ContactField::Email => self.email = None,
            ContactField::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Loose email shape check: something "@" something "." something,
/// no whitespace anywhere. Runs on the raw value, so a padded address
/// reports "invalid", not "required".
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let bytes = email.as_bytes();
    // Leftmost "@" with at least one character before it. Scanning bytes is
    // fine here: "@" and "." never occur inside a multi-byte sequence.
    let Some(at) = bytes.iter().skip(1).position(|&b| b == b'@').map(|i| i + 1) else {
        return false;
    };
    // Some "." with at least one character between it and the "@", and at
    // least one after it.
    bytes
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i >= at + 2 && i + 1 < bytes.len())
}

/// Run every rule and collect the full error set.
pub fn validate_contact(name: &str, email: &str, message: &str) -> ContactErrors {
    let mut errors = ContactErrors::default();

    if name.trim().is_empty() {
        errors.name = Some("Por favor, ingrese su nombre.".to_string());
    }
    if email.trim().is_empty() {
        errors.email = Some("Por favor, ingrese su correo electrónico.".to_string());
    } else if !is_valid_email(email) {
        errors.email = Some("Ingrese un correo electrónico válido.".to_string());
    }
    if message.trim().is_empty() {
        errors.message = Some("Por favor, ingrese su mensaje.".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty_yields_three_errors() {
        let errors = validate_contact("", "", "");

        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let errors = validate_contact("   ", "\t", "  \n");

        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn test_malformed_email_flags_only_email() {
        let errors = validate_contact("Ana", "foo", "Hola");

        assert!(errors.name.is_none());
        assert_eq!(
            errors.email.as_deref(),
            Some("Ingrese un correo electrónico válido.")
        );
        assert!(errors.message.is_none());
    }

    #[test]
    fn test_valid_submission_has_no_errors() {
        let errors = validate_contact("Ana", "ana@example.com", "Hola");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_and_malformed_mix() {
        // Rules are not short-circuited across fields
        let errors = validate_contact("", "foo", "Hola");

        assert_eq!(errors.name.as_deref(), Some("Por favor, ingrese su nombre."));
        assert_eq!(
            errors.email.as_deref(),
            Some("Ingrese un correo electrónico válido.")
        );
        assert!(errors.message.is_none());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("nombre.apellido@sub.dominio.ar"));
        // A trailing dot rides along in the last segment
        assert!(is_valid_email("ana@example.com."));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("ana@example."));
        assert!(!is_valid_email("ana maria@example.com"));
    }

    #[test]
    fn test_padded_email_is_invalid_not_required() {
        // The shape check runs on the raw value
        let errors = validate_contact("Ana", "  ana@example.com", "Hola");
        assert_eq!(
            errors.email.as_deref(),
            Some("Ingrese un correo electrónico válido.")
        );
    }

    #[test]
    fn test_clear_touches_one_field() {
        let mut errors = validate_contact("", "", "");
        errors.clear(ContactField::Email);

        assert!(errors.name.is_some());
        assert!(errors.email.is_none());
        assert!(errors.message.is_some());

        errors.clear(ContactField::Name);
        errors.clear(ContactField::Message);
        assert!(errors.is_empty());
    }
}

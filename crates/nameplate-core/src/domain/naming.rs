use crate::domain::email::{derive_local_part, EmailDeriver};
use crate::domain::name::NameStandardizer;
use crate::domain::person::PersonDraft;
use crate::error::CoreError;
use once_cell::sync::Lazy;

static DEFAULT_NAMING: Lazy<Naming> = Lazy::new(Naming::default);

/// What to do with a name whose email local part strips away to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyLocalPart {
    #[default]
    Reject,
    Allow,
}

/// The name and email rules in effect for a process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Naming {
    names: NameStandardizer,
    emails: EmailDeriver,
    empty_local_part: EmptyLocalPart,
}

impl Naming {
    pub fn new(
        names: NameStandardizer,
        emails: EmailDeriver,
        empty_local_part: EmptyLocalPart,
    ) -> Self {
        Self {
            names,
            emails,
            empty_local_part,
        }
    }

    pub fn names(&self) -> &NameStandardizer {
        &self.names
    }

    pub fn emails(&self) -> &EmailDeriver {
        &self.emails
    }

    pub fn empty_local_part(&self) -> EmptyLocalPart {
        self.empty_local_part
    }

    pub fn draft(&self, raw_name: &str) -> Result<PersonDraft, CoreError> {
        if raw_name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }

        let name = self.names.standardize(raw_name);
        let local_part = derive_local_part(&name);
        if local_part.is_empty() && self.empty_local_part == EmptyLocalPart::Reject {
            return Err(CoreError::EmptyEmailLocalPart(name));
        }

        Ok(PersonDraft {
            raw_name: raw_name.to_string(),
            email: self.emails.address(&local_part),
            name,
        })
    }
}

/// Standardizes a raw name with the default particles.
pub fn standardize(raw_name: &str) -> String {
    DEFAULT_NAMING.names().standardize(raw_name)
}

/// Derives an address under the default domain from a standardized name.
pub fn derive(standardized_name: &str) -> String {
    DEFAULT_NAMING.emails().derive(standardized_name)
}

#[cfg(test)]
mod tests {
    use super::{derive, standardize, EmptyLocalPart, Naming};
    use crate::domain::email::EmailDeriver;
    use crate::domain::name::NameStandardizer;
    use crate::error::CoreError;

    #[test]
    fn draft_runs_standardize_then_derive() {
        let draft = Naming::default().draft("  joão   DA   silva ").expect("draft");
        assert_eq!(draft.raw_name, "  joão   DA   silva ");
        assert_eq!(draft.name, "João da Silva");
        assert_eq!(draft.email, "joao.da.silva@company.com.br");
    }

    #[test]
    fn draft_rejects_blank_names() {
        assert_eq!(Naming::default().draft(" \t "), Err(CoreError::EmptyName));
    }

    #[test]
    fn draft_rejects_empty_local_part_by_default() {
        let err = Naming::default().draft("王小明").unwrap_err();
        assert_eq!(err, CoreError::EmptyEmailLocalPart("王小明".to_string()));
    }

    #[test]
    fn draft_allows_empty_local_part_when_configured() {
        let naming = Naming::new(
            NameStandardizer::default(),
            EmailDeriver::default(),
            EmptyLocalPart::Allow,
        );
        let draft = naming.draft("!!!").expect("draft");
        assert_eq!(draft.name, "!!!");
        assert_eq!(draft.email, "@company.com.br");
    }

    #[test]
    fn free_functions_use_defaults() {
        assert_eq!(standardize("MARIA DOS SANTOS"), "Maria dos Santos");
        assert_eq!(derive("Maria dos Santos"), "maria.dos.santos@company.com.br");
        assert_eq!(derive(""), "@company.com.br");
    }
}

pub mod email;
pub mod ids;
pub mod name;
pub mod naming;
pub mod person;

pub use email::{derive_local_part, normalize_email_domain, EmailDeriver, DEFAULT_EMAIL_DOMAIN};
pub use ids::PersonId;
pub use name::{title_case_word, NameStandardizer, DEFAULT_PARTICLES};
pub use naming::{derive, standardize, EmptyLocalPart, Naming};
pub use person::{Person, PersonDraft};

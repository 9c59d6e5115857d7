use crate::domain::{Person, PersonDraft, PersonId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDto {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
            email: person.email,
            created_at: person.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewDto {
    pub name: String,
    pub email: String,
}

impl From<PersonDraft> for PreviewDto {
    fn from(draft: PersonDraft) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
        }
    }
}

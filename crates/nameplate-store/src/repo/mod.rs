pub mod people;

pub use people::PeopleRepo;

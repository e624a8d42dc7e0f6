pub mod revocation;
pub mod user;

pub use revocation::RevocationStore;
pub use user::UserRepository;

#[cfg(test)]
pub use revocation::MockRevocationStore;
#[cfg(test)]
pub use user::MockUserRepository;

//! Repository modules for database operations

pub mod admin;
pub mod hackathon;
pub mod password_reset;
pub mod user;
pub mod workshop;

pub use admin::AdminRepository;
pub use hackathon::HackathonRepository;
pub use password_reset::PasswordResetRepository;
pub use user::UserRepository;
pub use workshop::WorkshopRepository;

pub use self::read_file::read_file;
pub use self::write_file::write_file;

mod read_file;
mod write_file;

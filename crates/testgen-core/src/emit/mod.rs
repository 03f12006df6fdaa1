mod test_file;

pub use test_file::EmitError;
pub use test_file::render_test_file;
pub use test_file::write_test_file;

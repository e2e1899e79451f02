pub mod io;
pub mod state;

mod input;
mod output;
mod terminal;

pub use input::Input;
pub use output::Output;
pub use terminal::Terminal;

pub mod difficulty;
pub mod float_ext;
pub mod hint;
pub mod mods;
pub mod random;

pub mod collections;
pub mod evidence;
pub mod species;
pub mod temporal;

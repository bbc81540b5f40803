pub mod coerce;
pub mod keys;
pub mod mappers;
pub mod serializers;
pub mod xtream;

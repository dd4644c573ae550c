pub mod ecosystem_map;

pub mod synthetic_lattice;

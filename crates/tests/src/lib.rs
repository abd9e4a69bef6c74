#[cfg(test)]
mod common;

#[cfg(test)]
mod access_gate_tests;

#[cfg(test)]
mod gate_matrix_tests;

#[cfg(test)]
mod session_store_tests;

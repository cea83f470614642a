pub mod bitboard;
pub mod direction;
pub mod encode;
pub mod error;
pub mod grid;
pub mod masks;
pub mod rays;
pub mod square;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn fanorona(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use bitboard::Bitboard;
    use python_bindings::*;
    m.add_class::<PyRayTable>()?;
    m.add_function(wrap_pyfunction!(python_bindings::encode, m)?)?;
    m.add_function(wrap_pyfunction!(python_bindings::decode, m)?)?;
    m.add_function(wrap_pyfunction!(python_bindings::visualize, m)?)?;
    m.add("ROWS", bitboard::ROWS)?;
    m.add("COLS", bitboard::COLS)?;
    m.add("SQUARE_COUNT", bitboard::SQUARE_COUNT)?;
    m.add("BB_ALL", Bitboard::ALL.bits())?;
    m.add("BLACK_START", masks::BB_BLACK_START.bits())?;
    m.add("WHITE_START", masks::BB_WHITE_START.bits())?;
    m.add("MOVE_MASKS", masks::BB_MOVES.map(|bb| bb.bits()).to_vec())?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::bitboard::{Bitboard, SQUARE_COUNT};
    use crate::direction::Direction;
    use crate::error::Error;
    use crate::rays::RayTable;
    use crate::square::Square;

    fn value_error(err: Error) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    /// Pack rows of 0/1 cells (top row first) into the canonical integer.
    #[pyfunction]
    pub fn encode(rows: Vec<Vec<u8>>) -> PyResult<u64> {
        crate::encode::encode_rows(&rows)
            .map(|bb| bb.bits())
            .map_err(value_error)
    }

    /// Unpack a 45-bit integer into rows of 0/1 cells, top row first.
    #[pyfunction]
    pub fn decode(bits: u64) -> PyResult<Vec<Vec<u8>>> {
        if bits > Bitboard::ALL.bits() {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "bitboard value does not fit in 45 bits",
            ));
        }
        let grid = crate::encode::decode(Bitboard::new(bits));
        Ok(grid.to_rows().iter().map(|row| row.to_vec()).collect())
    }

    /// Diagnostic rendering of any integer's low 45 bits.
    #[pyfunction]
    pub fn visualize(bits: u64) -> String {
        crate::encode::visualize(bits)
    }

    #[pyclass(name = "RayTable")]
    #[derive(Clone)]
    pub struct PyRayTable {
        table: RayTable,
    }

    #[pymethods]
    impl PyRayTable {
        /// The table for the standard rules.
        #[new]
        pub fn new() -> Self {
            PyRayTable {
                table: RayTable::standard(),
            }
        }

        /// Build a table from 45 custom destination masks.
        #[staticmethod]
        pub fn with_masks(masks: Vec<u64>) -> PyResult<Self> {
            if masks.len() != SQUARE_COUNT {
                return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "expected {} masks, got {}",
                    SQUARE_COUNT,
                    masks.len()
                )));
            }
            let mut move_masks = [Bitboard::EMPTY; SQUARE_COUNT];
            for (i, &bits) in masks.iter().enumerate() {
                if bits > Bitboard::ALL.bits() {
                    return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                        "mask {} does not fit in 45 bits",
                        i
                    )));
                }
                move_masks[i] = Bitboard::new(bits);
            }
            Ok(PyRayTable {
                table: RayTable::build(&move_masks),
            })
        }

        pub fn ray(&self, square: usize, direction: usize) -> PyResult<u64> {
            let from = Square::from_index(square).map_err(value_error)?;
            let dir = Direction::from_index(direction).map_err(value_error)?;
            Ok(self.table.ray(from, dir).bits())
        }

        pub fn rays_from(&self, square: usize) -> PyResult<Vec<u64>> {
            let from = Square::from_index(square).map_err(value_error)?;
            Ok(self.table.rays_from(from).iter().map(|bb| bb.bits()).collect())
        }

        pub fn __repr__(&self) -> String {
            format!("RayTable({}x{})", SQUARE_COUNT, Direction::COUNT)
        }
    }
}

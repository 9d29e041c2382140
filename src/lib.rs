//! rgbfilter
//!
//! Fixed image filters for 24-bit RGB bitmaps held in memory:
//! grayscale, sepia, horizontal reflection and 3x3 box blur.
//! Optional Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! An [`Image`] is a `height x width` grid of [`Pixel`]s, each with 8-bit
//! red, green and blue channels. Dimensions are fixed when the image is built
//! and every filter works in place.
//!
//! Decoding and encoding bitmap files is left to the caller; images can be
//! built from pixels, from a (height, width, 3) `ndarray`, or from flat RGB
//! bytes.
//!
//! ## Features
//! - `parallel` (default): process rows with rayon
//! - `python`: PyO3 extension module `rgbfilter`
//! - `wasm`: wasm-bindgen exports
//!
//! ```
//! use rgbfilter::{Filter, Image, Pixel};
//!
//! let mut img = Image::from_pixels(1, 2, vec![Pixel::rgb(10, 20, 30), Pixel::WHITE])?;
//! Filter::Grayscale.apply(&mut img);
//! assert_eq!(img[(0, 0)], Pixel::gray(20));
//! # Ok::<(), rgbfilter::Error>(())
//! ```

pub mod error;
pub mod filters;
pub mod image;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use filters::{box_blur, grayscale, reflect, sepia, Filter};
pub use image::{Image, Pixel};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::{Error, Filter, Image};

    impl From<Error> for PyErr {
        fn from(err: Error) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// Copy a numpy (H, W, 3) u8 array, filter it, and return a new array.
    fn run<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        filter: Filter,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut img = Image::from_rgb_array(image.as_array())?;
        filter.apply(&mut img);
        Ok(img.to_rgb_array().into_pyarray(py))
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Convert an RGB u8 image to grayscale (mean of R, G, B).
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Grayscale)
    }

    /// Apply sepia toning to an RGB u8 image.
    #[pyfunction]
    pub fn sepia<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Sepia)
    }

    /// Mirror an RGB u8 image left to right.
    #[pyfunction]
    pub fn reflect<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Reflect)
    }

    /// Apply a 3x3 box blur to an RGB u8 image.
    #[pyfunction]
    pub fn blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, Filter::Blur)
    }

    /// Apply a filter selected by name ("grayscale", "sepia", "reflect",
    /// "blur" or the flags "g", "s", "r", "b").
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        name: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let filter: Filter = name.parse()?;
        run(py, image, filter)
    }

    /// rgbfilter extension module
    #[pymodule]
    pub fn rgbfilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(sepia, m)?)?;
        m.add_function(wrap_pyfunction!(reflect, m)?)?;
        m.add_function(wrap_pyfunction!(blur, m)?)?;
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::rgbfilter;

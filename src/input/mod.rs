//! Element tables supplied by an upstream ion matcher.
//!
//! Theoretical fragments and their match status usually come from another
//! tool. [`ElementSource`] hands them over one at a time;
//! [`TsvElementReader`] reads them from a tab-separated table with a header
//! row:
//!
//! ```text
//! annotation	mz	intensity	matched
//! b1	98.06	1200.5	true
//! y1	148.06	0	false
//! ```
//!
//! The `intensity` column is optional.

mod error;
mod tsv;

pub use error::InputError;
pub use tsv::TsvElementReader;

use crate::element::Element;

/// A provider of fragment elements, read one row at a time
pub trait ElementSource {
    /// Next element, or `None` once the source is exhausted
    fn next_element(&mut self) -> Result<Option<Element>, InputError>;

    /// Drain the source into a vector, stopping at the first error
    fn collect_elements(&mut self) -> Result<Vec<Element>, InputError> {
        let mut elements = Vec::new();
        while let Some(element) = self.next_element()? {
            elements.push(element);
        }
        Ok(elements)
    }
}

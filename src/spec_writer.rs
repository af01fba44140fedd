use std::{
    fmt::{Display, Formatter},
    ops::{Deref, DerefMut},
};

const SECTION_END_MARKER: isize = -1;

pub(crate) struct SpecWriter<'a, 'b>(&'a mut Formatter<'b>);

impl<'b> Deref for SpecWriter<'_, 'b> {
    type Target = Formatter<'b>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl DerefMut for SpecWriter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl<'a, 'b> SpecWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut Formatter<'b>) -> Self {
        Self(f)
    }

    pub(crate) fn line<T: Display>(&mut self, value: T) -> std::fmt::Result {
        writeln!(self, "{value}")
    }

    /// Header line followed by one line per value. The header is written even
    /// when `values` is empty.
    pub(crate) fn section<T: Display>(&mut self, key: &str, values: &[T]) -> std::fmt::Result {
        self.line(key)?;
        for val in values {
            self.line(val)?;
        }
        Ok(())
    }

    /// Concorde-style section: the header runs straight into the first value
    /// and the closing `-1` has no newline, so the next line follows it
    /// directly (`KEY1 1 3\n...-1EOF`).
    pub(crate) fn terminated_section<T: Display>(
        &mut self,
        key: &str,
        values: &[T],
    ) -> std::fmt::Result {
        write!(self, "{key}")?;
        for val in values {
            self.line(val)?;
        }
        write!(self, "{SECTION_END_MARKER}")
    }

    pub(crate) fn kv_colon<T: Display>(&mut self, key: &str, value: T) -> std::fmt::Result {
        writeln!(self, "{key}: {value}")
    }

    pub(crate) fn opt_kv_colon<T: Display>(
        &mut self,
        key: &str,
        value: Option<T>,
    ) -> std::fmt::Result {
        if let Some(value) = value {
            self.kv_colon(key, value)?;
        }
        Ok(())
    }
}

pub(crate) mod dense;

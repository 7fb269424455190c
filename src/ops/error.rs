use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("non-numeric pKa '{value}' for residue '{res_name}' ({res_id})")]
    NonNumericPka {
        res_name: String,
        res_id: String,
        value: String,
    },
}

impl Error {
    pub fn non_numeric_pka(
        res_name: impl Into<String>,
        res_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NonNumericPka {
            res_name: res_name.into(),
            res_id: res_id.into(),
            value: value.into(),
        }
    }
}

//! Contact form check.

use std::io::{self, Write};

use saber_simples_storefront::contact::ContactForm;
use saber_simples_storefront::error::AppError;

/// Validate a contact submission and print the feedback the page would show.
///
/// # Errors
///
/// Returns `AppError::Contact` if the form is rejected, after printing the
/// feedback line.
pub fn submit(form: &ContactForm) -> Result<(), AppError> {
    let feedback = form.submit();
    writeln!(io::stdout().lock(), "{}", feedback.message)?;
    form.validate()?;
    Ok(())
}

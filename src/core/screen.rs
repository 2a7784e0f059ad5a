//! Toolkit-agnostic model of the converter screen.
//!
//! A host UI forwards its selection and button events here and renders the
//! resulting texts. The screen owns no widgets; it only holds what the
//! widgets display.
use crate::core::currency::CurrencyCode;
use crate::core::engine::{ConversionEngine, format_amount};
use crate::core::error::{ConvertError, Result};
use crate::core::input::parse_amount;
use tracing::debug;

/// Transient message for the user. Shown once, never stored in screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    EmptyAmount,
    InvalidAmount,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::EmptyAmount => "Please enter an amount!",
            Notification::InvalidAmount => "Invalid amount!",
        }
    }

    fn from_error(err: &ConvertError) -> Option<Self> {
        match err {
            ConvertError::EmptyInput => Some(Notification::EmptyAmount),
            ConvertError::InvalidNumber(_) | ConvertError::NegativeAmount(_) => {
                Some(Notification::InvalidAmount)
            }
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ConverterScreen {
    engine: ConversionEngine,
    from: CurrencyCode,
    to: CurrencyCode,
    from_symbol: String,
    to_symbol: String,
    output: String,
    rate_text: String,
    notification: Option<Notification>,
}

impl ConverterScreen {
    /// Opens the screen with both selections on the first currency.
    pub fn new(engine: ConversionEngine) -> Result<Self> {
        let initial = CurrencyCode::ALL[0];
        Self::with_selection(engine, initial, initial)
    }

    pub fn with_selection(
        engine: ConversionEngine,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<Self> {
        let from_symbol = engine.table().symbol(from)?.to_string();
        let to_symbol = engine.table().symbol(to)?.to_string();
        let rate_text = engine.display_rate(from, to)?;
        Ok(ConverterScreen {
            engine,
            from,
            to,
            from_symbol,
            to_symbol,
            output: String::new(),
            rate_text,
            notification: None,
        })
    }

    pub fn select_from(&mut self, code: CurrencyCode) -> Result<()> {
        debug!("Source currency selected: {code}");
        self.from_symbol = self.engine.table().symbol(code)?.to_string();
        self.from = code;
        self.refresh_rate()
    }

    pub fn select_to(&mut self, code: CurrencyCode) -> Result<()> {
        debug!("Target currency selected: {code}");
        self.to_symbol = self.engine.table().symbol(code)?.to_string();
        self.to = code;
        self.refresh_rate()
    }

    /// Handles the convert button.
    ///
    /// Input problems become a notification and leave the output and rate
    /// texts as they were. Only non-input errors are returned.
    pub fn press_convert(&mut self, amount_text: Option<&str>) -> Result<()> {
        let amount = match parse_amount(amount_text) {
            Ok(amount) => amount,
            Err(err) => match Notification::from_error(&err) {
                Some(notification) => {
                    debug!("Rejected amount input: {err}");
                    self.notification = Some(notification);
                    return Ok(());
                }
                None => return Err(err),
            },
        };

        let converted = self.engine.convert(amount, self.from, self.to)?;
        self.output = format_amount(converted);
        self.refresh_rate()
    }

    fn refresh_rate(&mut self) -> Result<()> {
        self.rate_text = self.engine.display_rate(self.from, self.to)?;
        Ok(())
    }

    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub fn from(&self) -> CurrencyCode {
        self.from
    }

    pub fn to(&self) -> CurrencyCode {
        self.to
    }

    pub fn from_symbol(&self) -> &str {
        &self.from_symbol
    }

    pub fn to_symbol(&self) -> &str {
        &self.to_symbol
    }

    /// Last converted amount, empty until the first successful conversion.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn rate_text(&self) -> &str {
        &self.rate_text
    }
}

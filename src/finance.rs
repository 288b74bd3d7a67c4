// src/finance.rs
//
// Calculadoras: cuota de préstamo amortizado y valor futuro del ahorro.

use crate::model::{LoanInputs, LoanSummary, SavingsInputs};
use thiserror::Error;

/// Mensaje fijo que se muestra en el área de resultado si la entrada no vale
pub const INVALID_INPUT_MESSAGE: &str = "Please fill in all fields correctly.";

/// Tope de iteraciones del bucle de ahorro; por encima la UI se colgaría
pub const MAX_SAVINGS_MONTHS: f64 = 1e8;

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("campos vacíos, no numéricos o negativos")]
    InvalidInput,
    #[error("un préstamo sin pagos no tiene cuota")]
    NoPayments,
    #[error("{0} meses exceden el máximo permitido")]
    TooManyPeriods(f64),
}

/// Todos presentes, numéricos y >= 0
pub fn validate_inputs(values: &[Option<f64>]) -> bool {
    values
        .iter()
        .all(|v| matches!(v, Some(x) if !x.is_nan() && *x >= 0.0))
}

/// Lee un campo como lo haría `parseFloat` del navegador: ignora espacios
/// iniciales y toma el prefijo numérico más largo ("12abc" -> 12).
pub fn parse_field(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    // exponente solo si lleva al menos un dígito
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|x| x.is_finite())
}

/// Fórmula de amortización. Con tipo 0 la cuota es principal / pagos.
pub fn calculate_monthly_payment(principal: f64, monthly_rate: f64, payments: f64) -> f64 {
    if monthly_rate == 0.0 {
        return principal / payments;
    }
    principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-payments))
}

pub fn calculate_loan(inputs: LoanInputs) -> Result<LoanSummary, CalcError> {
    let LoanInputs {
        principal,
        term_years,
        annual_rate_percent,
    } = inputs;
    if !validate_inputs(&[Some(principal), Some(term_years), Some(annual_rate_percent)]) {
        return Err(CalcError::InvalidInput);
    }

    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    let payments = term_years * 12.0;
    if payments == 0.0 {
        return Err(CalcError::NoPayments);
    }

    let monthly_payment = calculate_monthly_payment(principal, monthly_rate, payments);
    // plazos positivos pero ínfimos (p.ej. 1e-320 años) dan cuota infinita
    if !monthly_payment.is_finite() {
        return Err(CalcError::NoPayments);
    }
    let total_payment = monthly_payment * payments;
    Ok(LoanSummary {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    })
}

/// Capitalización mensual iterativa: primero el interés, luego la aportación.
/// Con meses fraccionarios el bucle corre ceil(meses) veces.
pub fn calculate_future_value(inputs: SavingsInputs) -> f64 {
    let months = inputs.years * 12.0;
    let growth = 1.0 + inputs.annual_rate_percent / 100.0 / 12.0;
    let mut value = inputs.initial;
    let mut i = 0.0;
    while i < months {
        value = value * growth + inputs.monthly_contribution;
        i += 1.0;
    }
    value
}

pub fn format_loan(summary: &LoanSummary) -> String {
    format!(
        "Monthly Payment: ${:.2}, Total Payment: ${:.2}, Total Interest: ${:.2}",
        summary.monthly_payment, summary.total_payment, summary.total_interest
    )
}

pub fn format_future_value(value: f64) -> String {
    format!("Future Value: ${value:.2}")
}

/// Campos del formulario del préstamo, tal cual los escribe el usuario
#[derive(Debug, Clone, Default)]
pub struct LoanForm {
    pub amount: String,
    pub term: String,
    pub rate: String,
}

impl LoanForm {
    pub fn inputs(&self) -> Result<LoanInputs, CalcError> {
        let values = [
            parse_field(&self.amount),
            parse_field(&self.term),
            parse_field(&self.rate),
        ];
        match values {
            [Some(principal), Some(term_years), Some(annual_rate_percent)]
                if validate_inputs(&values) =>
            {
                Ok(LoanInputs {
                    principal,
                    term_years,
                    annual_rate_percent,
                })
            }
            _ => Err(CalcError::InvalidInput),
        }
    }

    /// Texto para el área de resultado
    pub fn submit(&self) -> String {
        match self.inputs().and_then(calculate_loan) {
            Ok(summary) => format_loan(&summary),
            Err(e) => {
                log::warn!("calculadora de préstamo: {e}");
                INVALID_INPUT_MESSAGE.to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SavingsForm {
    pub initial: String,
    pub monthly: String,
    pub rate: String,
    pub years: String,
}

impl SavingsForm {
    pub fn inputs(&self) -> Result<SavingsInputs, CalcError> {
        let values = [
            parse_field(&self.initial),
            parse_field(&self.monthly),
            parse_field(&self.rate),
            parse_field(&self.years),
        ];
        let inputs = match values {
            [
                Some(initial),
                Some(monthly_contribution),
                Some(annual_rate_percent),
                Some(years),
            ] if validate_inputs(&values) => SavingsInputs {
                initial,
                monthly_contribution,
                annual_rate_percent,
                years,
            },
            _ => return Err(CalcError::InvalidInput),
        };
        let months = inputs.years * 12.0;
        if months > MAX_SAVINGS_MONTHS {
            return Err(CalcError::TooManyPeriods(months));
        }
        Ok(inputs)
    }

    pub fn submit(&self) -> String {
        match self.inputs() {
            Ok(inputs) => format_future_value(calculate_future_value(inputs)),
            Err(e) => {
                log::warn!("calculadora de ahorro: {e}");
                INVALID_INPUT_MESSAGE.to_string()
            }
        }
    }
}

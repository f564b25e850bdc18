//! Interactive entry of the scenario form.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::domain::{InputField, ScenarioInputs};
use crate::error::Result;

/// Ask for each input in form order, offering the current value as default.
pub fn scenario(current: ScenarioInputs) -> Result<ScenarioInputs> {
    let theme = ColorfulTheme::default();
    let mut inputs = current;

    for field in InputField::ALL {
        inputs = match field {
            InputField::DaysOnFeed => {
                let days: u32 = Input::with_theme(&theme)
                    .with_prompt(field.prompt())
                    .default(inputs.days_on_feed)
                    .interact_text()?;
                ScenarioInputs {
                    days_on_feed: days,
                    ..inputs
                }
            }
            _ => {
                let value: f64 = Input::with_theme(&theme)
                    .with_prompt(field.prompt())
                    .default(inputs.get(field))
                    .interact_text()?;
                inputs.with(field, value)
            }
        };
    }

    Ok(inputs)
}

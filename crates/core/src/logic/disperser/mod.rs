mod disperser_input;
mod disperser_submit;

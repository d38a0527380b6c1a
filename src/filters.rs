use std::collections::HashMap;
use tera::Value;

pub fn imgcap(
    value: &Value,
    _: &HashMap<String, Value>
) -> tera::Result<Value> {

    let markup = tera::try_get_value!("imgcap", "value", String, value);
    let output = crate::CaptionImage::new(&markup).render();

    Ok(Value::String(output))
}

pub fn imgcap_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let markup = match args.get("markup") {
        Some(Value::String(markup)) => markup,
        Some(value) => {
            return Err(tera::Error::msg(format!(
                "Function `imgcap` received markup={} but `markup` can only be a string",
                value
            )))
        }
        None => {
            return Err(tera::Error::msg(
                "Function `imgcap` was called without a `markup` argument",
            ))
        }
    };

    let output = crate::CaptionImage::new(markup).render();

    Ok(Value::String(output))
}

pub fn markdown(
    value: &Value,
    _: &HashMap<String, Value>
) -> tera::Result<Value> {

    let input = tera::try_get_value!("markdown", "value", String, value);
    let output = crate::markdown::render(&input);

    Ok(Value::String(output))
}

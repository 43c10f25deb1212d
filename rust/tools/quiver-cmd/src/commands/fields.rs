use anyhow::Result;
use quiver_datemath::DateAddField;

pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&DateAddField::ALL)?);
        return Ok(());
    }

    for field in DateAddField::ALL {
        let class = match field.sub_second_digits() {
            Some(digits) => format!("sub-second ({digits} digits)"),
            None if field.is_calendar_unit() => "calendar-length".to_string(),
            None => "fixed-length".to_string(),
        };
        println!("{:<12} {class}", field.name());
    }
    Ok(())
}

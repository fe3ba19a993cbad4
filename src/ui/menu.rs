pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";

pub fn menu_lines(title: &str, options: &[&str]) -> Vec<String> {
    let mut lines = Vec::with_capacity(options.len() + 1);
    lines.push(title.to_string());
    lines.extend(
        options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("{}. {}", index + 1, option)),
    );
    lines
}

pub fn menu_prompt(count: usize) -> String {
    format!("Select an option (1-{}): ", count)
}

pub fn count_prompt(max: usize) -> String {
    format!("How many questions would you like to be asked (1-{})? ", max)
}

pub fn count_out_of_range(max: usize) -> String {
    format!("Please enter a number between 1 and {}.", max)
}

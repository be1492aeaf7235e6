//! Prompt templates for the text-generation model

pub fn destinations(interest: &str, count: usize) -> String {
    format!(
        "You are a travel expert. Suggest {count} different travel destinations \
         for someone interested in {interest}.\n\
         List only the names, separated by commas. Do not repeat any destination."
    )
}

pub fn budget(destination: &str, days: u32, style: &str) -> String {
    format!(
        "As a travel budget planner AI, suggest an estimated budget (in INR) \
         for a trip to {destination} for {days} days. The travel style is '{style}'. \
         Consider flight, stay, food, transport, and misc expenses. \
         Respond with only a number, no words or symbols."
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Command parsing — turns a typed line into a Command, and forgiving
// nicknames into the exact names the engine matches on.
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Roll,
    Move(String),
    Suggest { character: String, weapon: String },
    Status,
    Map,
    View,
    Help,
    EndTurn,
    Quit,
}

/// Words that start the weapon part of "suggest <character> <weapon>".
const WEAPON_KEYWORDS: &[&str] = &[
    "candlestick", "candle", "dagger", "lead", "pipe", "revolver", "gun", "rope", "wrench",
];

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb.to_lowercase().as_str() {
        "roll" => Ok(Command::Roll),
        "move" if rest.is_empty() => Err("Usage: move <room>".to_string()),
        "move" => Ok(Command::Move(strip_quotes(rest))),
        "suggest" => {
            let (character, weapon) = parse_suggestion(rest)?;
            Ok(Command::Suggest { character, weapon })
        }
        "status" => Ok(Command::Status),
        "map" => Ok(Command::Map),
        "view" => Ok(Command::View),
        "help" => Ok(Command::Help),
        "end" | "end-turn" => Ok(Command::EndTurn),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("Invalid command '{}'. Type 'help' for available commands.", other)),
    }
}

/// Split "<character> <weapon>" at the first weapon keyword, falling back
/// to "everything but the last word" as the character. Both parts are then
/// run through the nickname tables.
pub fn parse_suggestion(input: &str) -> Result<(String, String), String> {
    let cleaned = strip_quotes(input);
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    if parts.len() < 2 {
        return Err("Use: suggest <character> <weapon>, e.g. suggest \"Miss Scarlett\" Revolver".to_string());
    }

    let split = parts.iter()
        .skip(1)
        .position(|p| WEAPON_KEYWORDS.contains(&p.to_lowercase().as_str()))
        .map(|i| i + 1)
        .unwrap_or(parts.len() - 1);

    let character = parts[..split].join(" ");
    let weapon = parts[split..].join(" ");
    Ok((fix_character_name(&character), fix_weapon_name(&weapon)))
}

pub fn fix_character_name(name: &str) -> String {
    let fixed = match name.to_lowercase().as_str() {
        "miss scarlett" | "ms scarlett" | "scarlett" | "miss" => "Miss Scarlett",
        "colonel mustard" | "col mustard" | "mustard" | "colonel" => "Colonel Mustard",
        "mrs white" | "mrs. white" | "white" | "mrs" => "Mrs. White",
        "reverend green" | "mr green" | "mr. green" | "green" | "reverend" => "Reverend Green",
        "mrs peacock" | "mrs. peacock" | "peacock" => "Mrs. Peacock",
        "professor plum" | "prof plum" | "plum" | "professor" => "Professor Plum",
        _ => return name.to_string(),
    };
    fixed.to_string()
}

pub fn fix_weapon_name(name: &str) -> String {
    let fixed = match name.to_lowercase().as_str() {
        "candlestick" | "candle" => "Candlestick",
        "dagger" => "Dagger",
        "lead" | "pipe" | "lead pipe" => "Lead Pipe",
        "revolver" | "gun" => "Revolver",
        "rope" => "Rope",
        "wrench" => "Wrench",
        _ => return name.to_string(),
    };
    fixed.to_string()
}

fn strip_quotes(s: &str) -> String {
    s.replace(['"', '\''], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("roll"), Ok(Command::Roll));
        assert_eq!(parse_command("  END  "), Ok(Command::EndTurn));
        assert_eq!(parse_command("end-turn"), Ok(Command::EndTurn));
        assert_eq!(parse_command("move \"Dining Room\""), Ok(Command::Move("Dining Room".into())));
        assert!(parse_command("move").is_err());
        assert!(parse_command("dance").unwrap_err().contains("Invalid command"));
    }

    #[test]
    fn test_suggestion_splits_at_weapon_keyword() {
        assert_eq!(
            parse_suggestion("\"Miss Scarlett\" Revolver"),
            Ok(("Miss Scarlett".into(), "Revolver".into())),
        );
        assert_eq!(
            parse_suggestion("mrs. peacock lead pipe"),
            Ok(("Mrs. Peacock".into(), "Lead Pipe".into())),
        );
        assert_eq!(parse_suggestion("plum gun"), Ok(("Professor Plum".into(), "Revolver".into())));
    }

    #[test]
    fn test_suggestion_fallback_uses_last_word() {
        assert_eq!(
            parse_suggestion("Colonel Mustard Spoon"),
            Ok(("Colonel Mustard".into(), "Spoon".into())),
        );
        assert!(parse_suggestion("scarlett").is_err());
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(fix_character_name("Dr. Black"), "Dr. Black");
        assert_eq!(fix_weapon_name("poison"), "poison");
        assert_eq!(fix_character_name("GREEN"), "Reverend Green");
    }
}

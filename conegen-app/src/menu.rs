//! Menu commands for the interactive loop.

/// Actions available from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print a stored point by index.
    PrintPoint,
    /// Append a manually entered point.
    AddPoint,
    /// Save points and settings to their files.
    Save,
    /// Show the current cone parameters.
    ShowParams,
    /// Rotate the cone and resample.
    Rotate,
    /// Replace the cone parameters and resample.
    Reconfigure,
    /// Export the point set as ASCII PLY.
    ExportPly,
    /// Leave the program.
    Quit,
}

impl Command {
    /// Map a menu selection to a command.
    pub fn from_choice(choice: usize) -> Option<Command> {
        match choice {
            1 => Some(Command::PrintPoint),
            2 => Some(Command::AddPoint),
            3 => Some(Command::Save),
            4 => Some(Command::ShowParams),
            5 => Some(Command::Rotate),
            6 => Some(Command::Reconfigure),
            7 => Some(Command::ExportPly),
            0 => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Print the menu the loop offers on every pass.
pub fn print_menu() {
    println!();
    println!("Menu:");
    println!("1. Print point");
    println!("2. Add point");
    println!("3. Save to file");
    println!("4. Show region parameters");
    println!("5. Rotate cone");
    println!("6. Reconfigure cone");
    println!("7. Export PLY");
    println!("0. Exit");
}

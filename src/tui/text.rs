use crate::terminal::Frame;

pub fn print_help() {
    let mut frame = Frame::new();
    frame.box_top("cracktime");
    frame.box_line_center("Brute-force crack time estimator");
    frame.box_line("");
    frame.box_line("Type a password and watch how long an exhaustive search would take");
    frame.box_line("for a human (0.5 guesses/s) and a computer (10^9 guesses/s). Each");
    frame.box_line("chart keeps one point per length typed so far; shortening the");
    frame.box_line("password or changing character classes starts a new trend.");
    frame.box_line("");
    frame.box_line("USAGE:");
    frame.box_line("  cracktime [OPTIONS]");
    frame.box_line("");
    frame.box_line("OPTIONS:");
    frame.box_opt("  --defaults", "Ignore the saved settings for this run");
    frame.box_opt("  --log <FILE>", "Append debug logs to FILE");
    frame.box_opt("  -h, --help", "Display this help message");
    frame.box_opt("  -v, --version", "Display version");
    frame.box_line("");
    frame.box_line("KEYS:");
    frame.box_opt("  F1 .. F4", "Toggle lowercase, uppercase, digits, symbols");
    frame.box_opt("  F5 / F6", "Linear or logarithmic scale for the human / computer chart");
    frame.box_opt("  F7", "Show or hide the password");
    frame.box_opt("  F9", "Save enabled classes and chart scales");
    frame.box_opt("  Ctrl+U", "Clear the password");
    frame.box_opt("  Esc, Ctrl+C", "Quit");
    frame.box_line("");
    frame.box_line("Settings: ~/.config/cracktime/settings");
    frame.box_bottom();
    frame.print();
}

const HELP: &str = r#"top <type> <time_range> <limit> <offset>
search <query> <operator> <query operator> <type>
<type>: tracks, artists (top) | track, artist, album (search)
<time_range>: short, medium, long
<limit>: 1...50
<offset>: 0...50
_ is a wildcard for all inputs
to write a sentence with spaces, start it with " and end it with "
<query>: sentence
<operator>: or, not
<query operator>: sentence
exit, quit: leave the prompt"#;

pub fn help() {
    println!("{}", HELP);
}

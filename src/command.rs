// command.rs

/// Keywords the shell handles itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verb {
    ListMyDir,
    GetInto,
    CreateFile,
    RemoveFile,
    DisplayPwd,
    MakeDir,
    RemoveDir,
    CountFiles,
    DisplayTime,
    History,
    GetOut,
    InstallFile,
}

impl Verb {
    pub const ALL: [Verb; 12] = [
        Verb::ListMyDir,
        Verb::GetInto,
        Verb::CreateFile,
        Verb::RemoveFile,
        Verb::DisplayPwd,
        Verb::MakeDir,
        Verb::RemoveDir,
        Verb::CountFiles,
        Verb::DisplayTime,
        Verb::History,
        Verb::GetOut,
        Verb::InstallFile,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Verb::ListMyDir => "listmyDir",
            Verb::GetInto => "getInto",
            Verb::CreateFile => "createFile",
            Verb::RemoveFile => "removeFile",
            Verb::DisplayPwd => "displayPwd",
            Verb::MakeDir => "makeDir",
            Verb::RemoveDir => "removeDir",
            Verb::CountFiles => "countFiles",
            Verb::DisplayTime => "displayTime",
            Verb::History => "history",
            Verb::GetOut => "getOut",
            Verb::InstallFile => "installFile",
        }
    }

    fn with_arg(self, arg: &str) -> Command<'_> {
        match self {
            Verb::ListMyDir => Command::ListMyDir,
            Verb::GetInto => Command::GetInto(arg),
            Verb::CreateFile => Command::CreateFile(arg),
            Verb::RemoveFile => Command::RemoveFile(arg),
            Verb::DisplayPwd => Command::DisplayPwd,
            Verb::MakeDir => Command::MakeDir(arg),
            Verb::RemoveDir => Command::RemoveDir(arg),
            Verb::CountFiles => Command::CountFiles(arg),
            Verb::DisplayTime => Command::DisplayTime,
            Verb::History => Command::History,
            Verb::GetOut => Command::GetOut(arg),
            Verb::InstallFile => Command::InstallFile(arg),
        }
    }
}

/// One parsed input line. Arguments borrow the raw text after the verb.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command<'a> {
    ListMyDir,
    GetInto(&'a str),
    CreateFile(&'a str),
    RemoveFile(&'a str),
    DisplayPwd,
    MakeDir(&'a str),
    RemoveDir(&'a str),
    CountFiles(&'a str),
    DisplayTime,
    History,
    /// Always goes to `..`; the argument is accepted and ignored.
    GetOut(&'a str),
    InstallFile(&'a str),
    /// Anything else: the whole line names an executable.
    External(&'a str),
}

/// Matches a line against the verb keywords.
///
/// A verb only matches when its keyword is followed by the end of the line
/// or by one whitespace character; the argument is the rest of the line
/// after that single separator, untouched. `getIntoxyz` is therefore not
/// `getInto`, it is an external command named `getIntoxyz`.
pub fn parse(line: &str) -> Command<'_> {
    for verb in Verb::ALL {
        let Some(rest) = line.strip_prefix(verb.keyword()) else {
            continue;
        };
        let mut chars = rest.chars();
        match chars.next() {
            None => return verb.with_arg(""),
            Some(sep) if sep.is_whitespace() => return verb.with_arg(chars.as_str()),
            Some(_) => {}
        }
    }
    Command::External(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_take_the_rest_of_the_line_verbatim() {
        assert_eq!(parse("getInto /tmp"), Command::GetInto("/tmp"));
        assert_eq!(parse("createFile  two spaces"), Command::CreateFile(" two spaces"));
        assert_eq!(parse("makeDir \"quoted\""), Command::MakeDir("\"quoted\""));
        assert_eq!(parse("countFiles\tsrc"), Command::CountFiles("src"));
        assert_eq!(parse("installFile ./a.out"), Command::InstallFile("./a.out"));
    }

    #[test]
    fn bare_verbs_get_an_empty_argument() {
        assert_eq!(parse("getInto"), Command::GetInto(""));
        assert_eq!(parse("getOut"), Command::GetOut(""));
        assert_eq!(parse("removeDir "), Command::RemoveDir(""));
    }

    #[test]
    fn argumentless_verbs_ignore_trailing_text() {
        assert_eq!(parse("listmyDir"), Command::ListMyDir);
        assert_eq!(parse("listmyDir /etc"), Command::ListMyDir);
        assert_eq!(parse("displayPwd now"), Command::DisplayPwd);
        assert_eq!(parse("displayTime"), Command::DisplayTime);
        assert_eq!(parse("history 5"), Command::History);
        assert_eq!(parse("getOut somewhere"), Command::GetOut("somewhere"));
    }

    #[test]
    fn prefix_collisions_are_external_commands() {
        assert_eq!(parse("getIntoxyz"), Command::External("getIntoxyz"));
        assert_eq!(parse("historyx"), Command::External("historyx"));
        assert_eq!(parse("displayPwdfoo"), Command::External("displayPwdfoo"));
        assert_eq!(parse("removeFiles a"), Command::External("removeFiles a"));
    }

    #[test]
    fn unknown_lines_are_passed_whole() {
        assert_eq!(parse("ls"), Command::External("ls"));
        assert_eq!(parse("ls -la"), Command::External("ls -la"));
        assert_eq!(parse(" getInto /tmp"), Command::External(" getInto /tmp"));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(parse("ListMyDir"), Command::External("ListMyDir"));
        assert_eq!(parse("HISTORY"), Command::External("HISTORY"));
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch specs: classification, command assembly, and exit-code plumbing
//! through the real binary, with a fake `java` standing in for the JVM.

use crate::prelude::*;

#[test]
fn print_command_echoes_the_launch_line() {
    jrl()
        .fake_java()
        .args(&["-J-cmd", "script.rb"])
        .passes()
        .stdout_has("-Xbootclasspath/a:")
        .stdout_has("org.jruby.Main")
        .stdout_has("-X+T")
        .stdout_has("script.rb");
}

#[test]
fn without_print_flag_the_launch_line_stays_quiet() {
    jrl()
        .fake_java()
        .args(&["script.rb"])
        .passes()
        .stdout_lacks("org.jruby.Main");
}

#[test]
fn classic_mode_drops_the_embedded_flag() {
    jrl()
        .fake_java()
        .args(&["-J-cmd", "-Xclassic", "script.rb"])
        .passes()
        .stdout_has("org.jruby.Main")
        .stdout_lacks("-X+T");
}

#[test]
fn jruby_opts_tokens_are_classified_first() {
    jrl()
        .fake_java()
        .env("JRUBY_OPTS", "-J-Xmx64m")
        .args(&["-J-cmd", "script.rb"])
        .passes()
        .stdout_has("-Xmx64m");
}

#[test]
fn deprecated_graal_spelling_warns_on_stderr() {
    jrl()
        .fake_java()
        .args(&["-J-cmd", "-J-G:+Foo", "script.rb"])
        .passes()
        .stdout_has("-Dgraal.Foo=true")
        .stderr_has("deprecated");
}

#[test]
fn dangling_classpath_flag_is_a_usage_error() {
    jrl()
        .args(&["-J-cp"])
        .fails_with(2)
        .stderr_has("requires a following classpath entry");
}

#[test]
fn child_exit_code_is_propagated() {
    let java = FakeJava::exiting(7);
    jrl()
        .env("JAVACMD", &java.path())
        .args(&["script.rb"])
        .fails_with(7);
}

#[test]
fn child_receives_the_assembled_argv_and_home() {
    let java = FakeJava::exiting(0);
    jrl()
        .env("JAVACMD", &java.path())
        .args(&["-J-Xmx32m", "script.rb", "--flag"])
        .passes();

    let argv = java.argv();
    assert_eq!(argv.first().map(String::as_str), Some("-Xmx32m"));
    assert!(argv.iter().any(|a| a.starts_with("-Xbootclasspath/a:")));
    let main = argv.iter().position(|a| a == "org.jruby.Main").unwrap();
    assert_eq!(&argv[main + 1..], ["-X+T", "script.rb", "--flag"]);
    assert_eq!(java.recorded_home(), "/opt/jruby");
}

#[test]
fn missing_java_fails_with_a_spawn_error() {
    jrl()
        .env("JAVACMD", "/nonexistent/jrl/java")
        .args(&["script.rb"])
        .fails_with(1)
        .stderr_has("failed to spawn");
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use nagret::Config;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = toml::from_str::<Config>(content) else {
        return;
    };

    // Whatever was accepted must survive a save and reload unchanged
    let saved = toml::to_string(&config).expect("accepted config serializes");
    let reloaded: Config = toml::from_str(&saved).expect("saved config reloads");
    assert_eq!(reloaded.output.format, config.output.format);
    assert_eq!(reloaded.errors.exit_code, config.errors.exit_code);
    assert_eq!(reloaded.logging.level, config.logging.level);
});

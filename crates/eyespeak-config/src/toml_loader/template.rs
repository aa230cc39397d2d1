//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# EyeSpeak Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[eyes]
# closed_threshold = 0.25   # openness ratio below this = closed (0.01-1.0)
# mirrored = true           # selfie camera: landmark sides are swapped

[blink]
# short_blink_min_ms = 250  # 30-2000, must be shorter than the holds
# right_hold_ms = 1200      # 100-10000
# left_hold_ms = 1200       # 100-10000
# both_eyes_hold_ms = 600   # 100-10000
# cooldown_ms = 400         # 0-5000, spacing between blink/hold intents

[gaze]
# strategy = "center_hold"  # center_hold, fixed_interval
# left_threshold = 0.45     # gaze ratio below = left zone
# right_threshold = 0.60    # gaze ratio above = right zone
# neutral_hold_ms = 250     # center dwell that arms a move
# side_hold_ms = 550        # side dwell that fires a move
# fixed_interval_ms = 500   # fixed_interval only

[bindings]
# Intent names: select, delete, clear, insert_space, speak, stop_speak,
# navigate_prev, navigate_next, or "none".
# right_blink = "select"
# right_hold = "stop_speak"
# left_blink = "speak"
# left_hold = "delete"
# both_hold = "clear"

[session]
# stale_gap_ms = 1200       # face lost longer than this resets holds

[composer]
# start_screen = "words"    # words, letters
# highlight_revert_ms = 350
# words = ["yes", "no", "I", "You"]

[speech]
# backend = "log"           # log, command
# command = "espeak-ng"
# args = ["-s", "120"]

[logging]
# level = "info"            # trace, debug, info, warning, error
"##
    .to_string()
}

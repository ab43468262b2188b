//! Commented default config file content.

pub(super) fn default_config_toml() -> &'static str {
    r##"# folio configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[assistant]
# model = "gemini-1.5-flash"
# api_key_env = "GEMINI_API_KEY"   # name of the env var holding the key
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# temperature = 0.7          # 0.0-2.0
# top_k = 40                 # 1-1000
# top_p = 0.95               # 0.0-1.0
# max_output_tokens = 1024   # 1-65536
# safety_threshold = "BLOCK_MEDIUM_AND_ABOVE"  # BLOCK_NONE, BLOCK_ONLY_HIGH, BLOCK_LOW_AND_ABOVE
# connect_timeout_secs = 10  # 1-300
# request_timeout_secs = 60  # unset = no local timeout

[chat]
# bot_name = "Portfolio Assistant"
# welcome_message = "Hey! I'm the portfolio chatbot. Ask me anything about the owner and their coding experience."
# persona = "You are the assistant on a personal developer portfolio. ..."
# persona_file = "/path/to/persona.txt"   # overrides persona
# max_messages = 100         # 1-10000
# max_input_chars = 1000     # 1-100000
# replay_history = false     # send earlier turns with each request

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
}

use anyhow::Result;
use dialoguer::{Input, Password, Select};
use ndvi_core::workflow::{AuthMode, Credentials};

/// What the user picked on the login screen
pub enum AuthChoice {
    Authenticate(AuthMode, Credentials),
    Quit,
}

/// Actions offered once logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    DrawBoundingBox,
    LoadParcel,
    Compute,
    ViewChart,
    CloseChart,
    DownloadReport,
    NdviMap,
    Relogin,
    Logout,
    Quit,
}

const ACTIONS: [(ShellAction, &str); 10] = [
    (ShellAction::DrawBoundingBox, "Draw parcel (bounding box)"),
    (ShellAction::LoadParcel, "Load parcel from GeoJSON"),
    (ShellAction::Compute, "Compute NDVI"),
    (ShellAction::ViewChart, "View NDVI chart"),
    (ShellAction::CloseChart, "Close chart"),
    (ShellAction::DownloadReport, "Download report"),
    (ShellAction::NdviMap, "Show NDVI map overlay"),
    (ShellAction::Relogin, "Switch account"),
    (ShellAction::Logout, "Log out"),
    (ShellAction::Quit, "Quit"),
];

/// Login screen: log in, sign up or quit
pub fn prompt_auth(default_email: Option<&str>) -> Result<AuthChoice> {
    println!("\n🌱 NDVI Watch\n");

    let options = ["Log in", "Sign up", "Quit"];
    let selection = Select::new().with_prompt("Account").items(&options).default(0).interact()?;

    let mode = match selection {
        0 => AuthMode::Login,
        1 => AuthMode::Signup,
        _ => return Ok(AuthChoice::Quit),
    };

    let credentials = prompt_credentials(default_email)?;
    Ok(AuthChoice::Authenticate(mode, credentials))
}

/// Email and password prompts
pub fn prompt_credentials(default_email: Option<&str>) -> Result<Credentials> {
    let mut email_input = Input::<String>::new().with_prompt("Email");
    if let Some(email) = default_email {
        email_input = email_input.default(email.to_string());
    }
    let email = email_input.interact_text()?;
    let password = prompt_password()?;

    Ok(Credentials::new(email, password))
}

pub fn prompt_password() -> Result<String> {
    Ok(Password::new().with_prompt("Password").interact()?)
}

/// Main menu while logged in
pub fn prompt_action() -> Result<ShellAction> {
    let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
    let selection = Select::new().with_prompt("Action").items(&labels).default(0).interact()?;

    Ok(ACTIONS.get(selection).map(|(action, _)| *action).unwrap_or(ShellAction::Quit))
}

pub fn prompt_bbox() -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("Bounding box (min_lon,min_lat,max_lon,max_lat)")
        .interact_text()?)
}

pub fn prompt_parcel_path() -> Result<String> {
    Ok(Input::<String>::new().with_prompt("GeoJSON file").interact_text()?)
}

pub fn prompt_parcel_name() -> Result<Option<String>> {
    let name = Input::<String>::new()
        .with_prompt("Parcel name (optional, press Enter to skip)")
        .allow_empty(true)
        .interact_text()?;
    let name = name.trim();
    Ok((!name.is_empty()).then(|| name.to_string()))
}

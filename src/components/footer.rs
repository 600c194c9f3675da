use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::selectors::YEAR_ID;

/// Stamp the current year into the footer copyright line.
pub fn mount(_config: &SiteConfig) -> Result<()> {
    if let Some(el) = dom::by_id(YEAR_ID)? {
        let year = js_sys::Date::new_0().get_full_year();
        dom::set_text(&el, &year.to_string());
    }
    Ok(())
}

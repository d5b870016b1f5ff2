use sea_orm::DatabaseConnection;

use crate::{
    model::{api::NoticeDto, blacklist::GsfStatusDto},
    server::{
        data::blacklist::character::BlacklistRepository,
        error::Error,
        model::db::{EveCharacterModel, UserModel},
        service::blacklist::gsf::is_flagged,
        util::ip::login_ips,
    },
};

pub struct BlacklistCheckService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistCheckService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cross-references an applicant against every blacklist, producing reviewer notices
    ///
    /// Checks run in order: blacklisted IPs against the user's login IPs, GSF statuses
    /// (skipped when `gsf_statuses` is `None`), then character names against the internal
    /// blacklist. When nothing matched, a single info notice reports the applicant as clean.
    pub async fn check_applicant(
        &self,
        user: &UserModel,
        characters: &[EveCharacterModel],
        gsf_statuses: Option<&[GsfStatusDto]>,
    ) -> Result<Vec<NoticeDto>, Error> {
        let blacklist_repo = BlacklistRepository::new(self.db);
        let mut notices = Vec::new();

        let blacklisted_ips = blacklist_repo.get_distinct_ip_addresses().await?;
        let matched_ips = match_ips(&blacklisted_ips, &login_ips(user));
        if !matched_ips.is_empty() {
            notices.push(NoticeDto::error(format!(
                "Heads up this person's IP is on the blacklist: [{}]",
                matched_ips.join(", ")
            )));
        }

        if let Some(gsf_statuses) = gsf_statuses {
            let flagged: Vec<&str> = gsf_statuses
                .iter()
                .filter(|status| is_flagged(&status.status))
                .map(|status| status.character_name.as_str())
                .collect();

            if !flagged.is_empty() {
                notices.push(NoticeDto::error(format!(
                    "Check GSF blacklist results for character(s) {}",
                    flagged.join(" ")
                )));
            }
        }

        let names = characters
            .iter()
            .map(|character| character.name.clone())
            .collect();
        let matched_entries = blacklist_repo.get_matching_names(names).await?;
        if !matched_entries.is_empty() {
            let matched_names: Vec<&str> = matched_entries
                .iter()
                .map(|entry| entry.name.as_str())
                .collect();

            notices.push(NoticeDto::error(format!(
                "Double check blacklist, [{}] matched",
                matched_names.join(", ")
            )));
        }

        if notices.is_empty() {
            notices.push(NoticeDto::info("All blacklists are clean."));
        }

        Ok(notices)
    }
}

/// User IPs containing any blacklisted IP as a substring, in order and without duplicates
fn match_ips(blacklisted_ips: &[String], user_ips: &[String]) -> Vec<String> {
    let mut matched: Vec<String> = Vec::new();

    for blacklisted in blacklisted_ips {
        for ip in user_ips {
            if ip.contains(blacklisted.as_str()) && !matched.contains(ip) {
                matched.push(ip.clone());
            }
        }
    }

    matched
}

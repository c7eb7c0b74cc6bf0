use time::OffsetDateTime;
use tracing::{debug, info};

use super::model::{Designation, FamilyMember, Frequency, Task};
use crate::{error::AppError, session::model::Session};

const NO_MEMBERS: &str = "Add a family member on the left to start assigning tasks.";

pub fn add_member(
    session: &mut Session,
    name: &str,
    designation: Designation,
) -> Result<FamilyMember, AppError> {
    session.require_user()?;
    if name.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let member = FamilyMember {
        name: name.to_string(),
        designation,
    };
    session.family_members.push(member.clone());
    info!(name = %member.name, designation = ?designation, "family member added");
    Ok(member)
}

pub fn add_task(
    session: &mut Session,
    now: OffsetDateTime,
    description: &str,
    assignee: &str,
    frequency: Frequency,
) -> Result<Task, AppError> {
    session.require_user()?;
    if description.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }
    if session.family_members.is_empty() {
        return Err(AppError::InvalidInput(NO_MEMBERS.into()));
    }
    if !session.family_members.iter().any(|m| m.name == assignee) {
        return Err(AppError::InvalidInput(format!(
            "{assignee} is not a family member"
        )));
    }

    let task = Task {
        id: session.next_task_id(now),
        description: description.to_string(),
        assignee: assignee.to_string(),
        frequency,
        done: false,
    };
    session.tasks.push(task.clone());
    info!(task_id = %task.id, assignee = %task.assignee, "task added");
    Ok(task)
}

/// Sets `done` on a task. Repeating the same value changes nothing.
pub fn set_task_done(session: &mut Session, id: &str, done: bool) -> Result<Task, AppError> {
    session.require_user()?;
    let task = session
        .tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(AppError::TaskNotFound)?;
    task.done = done;
    debug!(task_id = %id, done, "task toggled");
    Ok(task.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> Session {
        let mut session = Session::new(OffsetDateTime::now_utc());
        session.sign_in("demo_mom");
        session
    }

    #[test]
    fn add_member_appends_in_order() {
        let mut session = logged_in();
        add_member(&mut session, "Mia", Designation::Child).unwrap();
        add_member(&mut session, "Mia", Designation::Pet).unwrap();
        assert_eq!(
            session.family_members,
            vec![
                FamilyMember { name: "Mia".into(), designation: Designation::Child },
                FamilyMember { name: "Mia".into(), designation: Designation::Pet },
            ]
        );
    }

    #[test]
    fn blank_member_name_is_ignored() {
        let mut session = logged_in();
        let err = add_member(&mut session, "   ", Designation::Spouse).unwrap_err();
        assert!(matches!(err, AppError::EmptyInput));
        assert!(session.family_members.is_empty());
    }

    #[test]
    fn logged_out_session_cannot_add_members() {
        let mut session = Session::new(OffsetDateTime::now_utc());
        let err = add_member(&mut session, "Mia", Designation::Child).unwrap_err();
        assert!(matches!(err, AppError::NotAuthenticated));
    }

    #[test]
    fn add_task_creates_pending_task_with_unique_id() {
        let mut session = logged_in();
        add_member(&mut session, "Mia", Designation::Child).unwrap();
        let now = OffsetDateTime::now_utc();
        let first = add_task(&mut session, now, "Pack lunch", "Mia", Frequency::Daily).unwrap();
        let second = add_task(&mut session, now, "Sign slip", "Mia", Frequency::OneTime).unwrap();

        assert!(!first.done);
        assert_eq!(first.assignee, "Mia");
        assert_ne!(first.id, second.id);
        assert_eq!(session.tasks, vec![first, second]);
    }

    #[test]
    fn add_task_needs_description_and_known_assignee() {
        let mut session = logged_in();
        let now = OffsetDateTime::now_utc();
        assert!(matches!(
            add_task(&mut session, now, "Pack lunch", "Mia", Frequency::Daily),
            Err(AppError::InvalidInput(_))
        ));

        add_member(&mut session, "Mia", Designation::Child).unwrap();
        assert!(matches!(
            add_task(&mut session, now, "", "Mia", Frequency::Daily),
            Err(AppError::EmptyInput)
        ));
        assert!(matches!(
            add_task(&mut session, now, "Walk", "Rex", Frequency::Weekly),
            Err(AppError::InvalidInput(_))
        ));
        assert!(session.tasks.is_empty());
    }

    #[test]
    fn set_task_done_is_idempotent() {
        let mut session = logged_in();
        add_member(&mut session, "Mia", Designation::Child).unwrap();
        let task = add_task(
            &mut session,
            OffsetDateTime::now_utc(),
            "Pack lunch",
            "Mia",
            Frequency::Daily,
        )
        .unwrap();

        set_task_done(&mut session, &task.id, true).unwrap();
        let again = set_task_done(&mut session, &task.id, true).unwrap();
        assert!(again.done);
        assert!(session.tasks[0].done);

        set_task_done(&mut session, &task.id, false).unwrap();
        assert!(!session.tasks[0].done);
    }

    #[test]
    fn set_task_done_unknown_id() {
        let mut session = logged_in();
        assert!(matches!(
            set_task_done(&mut session, "nope", true),
            Err(AppError::TaskNotFound)
        ));
    }
}

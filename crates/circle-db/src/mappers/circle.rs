//! Circle models -> entity mapper

use circle_core::{Circle, CircleId, CircleName, DomainError, UserId};

use crate::models::{CircleMemberModel, CircleMemberRow, CircleModel};

/// Rebuild a circle from its row and its membership rows
///
/// Members are ordered by `position`, which preserves insertion order.
pub fn circle_from_rows(
    model: CircleModel,
    mut members: Vec<CircleMemberModel>,
) -> Result<Circle, DomainError> {
    let name = CircleName::new(&model.name).map_err(|e| {
        DomainError::DatabaseError(format!("corrupt circle row {}: {e}", model.id))
    })?;

    members.sort_by_key(|m| m.position);
    let member_ids = members
        .into_iter()
        .map(|m| UserId::from_uuid(m.user_id))
        .collect();

    Ok(Circle::reconstruct(
        CircleId::from_uuid(model.id),
        name,
        UserId::from_uuid(model.owner_id),
        member_ids,
        model.created_at,
    ))
}

/// Group joined rows into circles
///
/// Rows must be ordered so that all rows of one circle are adjacent; the
/// order of first appearance is kept.
pub fn circles_from_joined_rows(rows: Vec<CircleMemberRow>) -> Result<Vec<Circle>, DomainError> {
    let mut circles = Vec::new();
    let mut current: Option<(CircleModel, Vec<CircleMemberModel>)> = None;

    for row in rows {
        let (model, member) = row.split();
        if let Some((_, members)) = current.as_mut().filter(|(open, _)| open.id == model.id) {
            members.extend(member);
            continue;
        }
        if let Some((open, members)) = current.take() {
            circles.push(circle_from_rows(open, members)?);
        }
        current = Some((model, member.into_iter().collect()));
    }
    if let Some((open, members)) = current {
        circles.push(circle_from_rows(open, members)?);
    }

    Ok(circles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_members_follow_position() {
        let circle_id = Uuid::new_v4();
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let row = CircleModel {
            id: circle_id,
            name: "Chess Club".to_string(),
            owner_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        let members = vec![
            CircleMemberModel { circle_id, user_id: c, position: 2 },
            CircleMemberModel { circle_id, user_id: a, position: 0 },
            CircleMemberModel { circle_id, user_id: b, position: 1 },
        ];

        let circle = circle_from_rows(row, members).unwrap();
        let ids: Vec<Uuid> = circle.member_ids().iter().map(|id| id.into_inner()).collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(circle.total_participants(), 4);
    }

    #[test]
    fn test_corrupt_name() {
        let row = CircleModel {
            id: Uuid::new_v4(),
            name: "ab".to_string(),
            owner_id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        assert!(matches!(
            circle_from_rows(row, Vec::new()),
            Err(DomainError::DatabaseError(_))
        ));
    }

    fn joined(id: Uuid, name: &str, member: Option<(Uuid, i32)>) -> CircleMemberRow {
        CircleMemberRow {
            id,
            name: name.to_string(),
            owner_id: Uuid::nil(),
            created_at: Utc::now(),
            member_id: member.map(|(m, _)| m),
            position: member.map(|(_, p)| p),
        }
    }

    #[test]
    fn test_group_joined_rows() {
        let (chess, go) = (Uuid::new_v4(), Uuid::new_v4());
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let rows = vec![
            joined(chess, "Chess Club", Some((a, 0))),
            joined(chess, "Chess Club", Some((b, 1))),
            joined(go, "Go Club", None),
        ];

        let circles = circles_from_joined_rows(rows).unwrap();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].id().into_inner(), chess);
        assert_eq!(circles[0].member_count(), 2);
        assert_eq!(circles[1].id().into_inner(), go);
        assert_eq!(circles[1].member_count(), 0);
    }

    #[test]
    fn test_group_no_rows() {
        assert!(circles_from_joined_rows(Vec::new()).unwrap().is_empty());
    }
}

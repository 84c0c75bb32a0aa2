// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::matching;
use crate::models::{
    ExpenseOutcome, ExpenseRequest, ExpenseSubmission, GroupInfo, SplitInfo, UserInfo,
};
use crate::split::{self, SplitMethod};
use crate::splitwise::SplitwiseClient;

pub fn create(client: &SplitwiseClient, req: &ExpenseRequest) -> Result<ExpenseOutcome> {
    let missing = req.missing_fields();
    if !missing.is_empty() {
        return Err(Error::MissingFields { fields: missing });
    }
    let amount = req.amount.as_deref().unwrap_or_default();
    let description = req.description.as_deref().unwrap_or_default();
    let group_name = req.group_name.as_deref().unwrap_or_default();
    let currency = req.currency_code.clone().filter(|c| !c.is_empty());

    let current_user = client.get_current_user()?;
    let groups = client.get_groups()?;
    let group = matching::find_group(&groups, group_name)?;
    if group.members.is_empty() {
        return Err(Error::EmptyGroup);
    }

    let submission = match SplitMethod::parse(req.split_method.as_deref()) {
        SplitMethod::Equal => {
            ExpenseSubmission::equal_split(amount, description, currency.clone(), group.id)
        }
        SplitMethod::SelectedEqually => {
            let names =
                split::parse_selected_people(req.selected_people.as_deref().unwrap_or_default());
            if names.is_empty() {
                return Err(Error::NoSelectedPeople);
            }
            let selected = matching::find_members(&group.members, &names)?;
            let shares = split::selected_equal_shares(amount, current_user.id, &selected)?;
            ExpenseSubmission::with_user_shares(
                amount,
                description,
                currency.clone(),
                group.id,
                &shares,
            )
        }
        SplitMethod::Custom => {
            let specs = req.user_splits.as_deref().unwrap_or_default();
            if specs.is_empty() {
                return Err(Error::NoUserSplits);
            }
            let shares = split::custom_shares(specs, amount, current_user.id)?;
            ExpenseSubmission::with_user_shares(
                amount,
                description,
                currency.clone(),
                group.id,
                &shares,
            )
        }
    };

    let response = client.create_expense(&submission)?;
    // The service can accept the request at the HTTP level and still
    // reject the expense in the body.
    if !response.errors.is_empty() {
        return Err(Error::ExpenseRejected {
            messages: response.errors.messages(),
        });
    }
    let expense = response
        .expenses
        .into_iter()
        .next()
        .ok_or(Error::NoExpenseReturned)?;

    Ok(ExpenseOutcome {
        success: true,
        expense_id: expense.id,
        group_info: GroupInfo {
            group_id: group.id,
            group_name: group.name.clone(),
        },
        user_info: UserInfo {
            current_user_id: current_user.id,
            current_user_name: current_user.full_name(),
        },
        split_info: SplitInfo {
            split_method: req
                .split_method
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "equal".to_string()),
            total_amount: amount.to_string(),
            currency,
        },
        expense,
    })
}

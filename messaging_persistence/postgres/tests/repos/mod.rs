mod contact;
mod recipient;

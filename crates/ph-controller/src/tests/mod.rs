mod experience;
